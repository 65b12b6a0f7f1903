pub mod cli {
    pub mod parser;
}
pub mod config;
pub mod error;
pub mod github {
    pub mod issues;
    pub mod transport;
}
pub mod logging;
pub mod output;
pub mod run;
