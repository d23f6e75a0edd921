mod about;
mod footer;
mod hero;
pub mod projects;

pub use about::AboutSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
