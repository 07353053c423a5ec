pub mod aggregate;
pub mod cli;
pub mod ext;
pub mod github;
pub mod model;
pub mod present;
pub mod render;
pub mod report;
pub mod util;
pub mod window;
