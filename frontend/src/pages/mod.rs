pub mod complete_profile;
pub mod home;
pub mod login;
pub mod privacy_terms;
pub mod signup;

pub use complete_profile::{CompanyProfileCompletion, JobSeekerProfileCompletion};
pub use home::HomePage;
