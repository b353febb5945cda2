use crate::api::{SignUpRequest, SignupIntent};
use serde_json::{json, Value};
use thiserror::Error;

pub const COMPANY_SIZES: [&str; 5] = ["1-10", "11-50", "51-200", "201-1000", "1000+"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Website must start with http:// or https://")]
    InvalidWebsite,
    #[error("Unknown company size: {0}")]
    UnknownCompanySize(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileDetails {
    JobSeeker {
        headline: String,
        location: String,
        skills: Vec<String>,
    },
    Company {
        company_name: String,
        industry: String,
        company_size: String,
        website: Option<String>,
    },
}

fn required(value: &str, field: &'static str) -> Result<String, ProfileError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ProfileError::Missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Comma separated, trimmed, case-insensitively de-duplicated.
pub fn parse_skills(raw: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for skill in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !skills.iter().any(|known| known.eq_ignore_ascii_case(skill)) {
            skills.push(skill.to_string());
        }
    }
    skills
}

pub fn job_seeker_details(
    headline: &str,
    location: &str,
    skills: &str,
) -> Result<ProfileDetails, ProfileError> {
    let headline = required(headline, "Headline")?;
    let location = required(location, "Location")?;
    let skills = parse_skills(skills);
    if skills.is_empty() {
        return Err(ProfileError::Missing("At least one skill"));
    }
    Ok(ProfileDetails::JobSeeker {
        headline,
        location,
        skills,
    })
}

pub fn company_details(
    company_name: &str,
    industry: &str,
    company_size: &str,
    website: &str,
) -> Result<ProfileDetails, ProfileError> {
    let company_name = required(company_name, "Company name")?;
    let industry = required(industry, "Industry")?;
    let company_size = required(company_size, "Company size")?;
    if !COMPANY_SIZES.contains(&company_size.as_str()) {
        return Err(ProfileError::UnknownCompanySize(company_size));
    }
    let website = match website.trim() {
        "" => None,
        url if url.starts_with("http://") || url.starts_with("https://") => Some(url.to_string()),
        _ => return Err(ProfileError::InvalidWebsite),
    };
    Ok(ProfileDetails::Company {
        company_name,
        industry,
        company_size,
        website,
    })
}

fn metadata(intent: &SignupIntent, details: &ProfileDetails) -> Value {
    let mut data = json!({
        "name": intent.name,
        "user_type": intent.user_type,
    });
    let extra = match details {
        ProfileDetails::JobSeeker {
            headline,
            location,
            skills,
        } => json!({ "headline": headline, "location": location, "skills": skills }),
        ProfileDetails::Company {
            company_name,
            industry,
            company_size,
            website,
        } => json!({
            "company_name": company_name,
            "industry": industry,
            "company_size": company_size,
            "website": website,
        }),
    };
    if let (Some(map), Value::Object(extra)) = (data.as_object_mut(), extra) {
        map.extend(extra);
    }
    data
}

pub fn sign_up_request(intent: &SignupIntent, details: &ProfileDetails) -> SignUpRequest {
    SignUpRequest {
        email: intent.email.clone(),
        password: intent.password.clone(),
        data: metadata(intent, details),
    }
}
