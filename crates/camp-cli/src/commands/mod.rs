//! Command implementations.

pub mod assign;
pub mod camp;
pub mod config;
pub mod curriculum;
pub mod instructor;
pub mod location;

pub use self::assign::execute_assign;
pub use self::camp::execute_camp;
pub use self::config::execute_config;
pub use self::curriculum::execute_curriculum;
pub use self::instructor::execute_instructor;
pub use self::location::execute_location;
