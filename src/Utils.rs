/// console logger setup
pub mod logger;
