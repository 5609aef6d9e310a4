pub mod geocode;
pub mod login;
pub mod logout;
pub mod profile;
pub mod profiles;
pub mod whoami;

pub use geocode::*;
pub use login::*;
pub use logout::*;
pub use profile::*;
pub use profiles::*;
pub use whoami::*;
