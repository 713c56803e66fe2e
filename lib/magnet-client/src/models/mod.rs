//! Data transfer objects mirroring the server schemas.

mod account;
pub use self::account::{ModifyPassword, RegisterFirstAdmin, RegisterUser};

mod scaffold;
pub use self::scaffold::{DummyCreate, DummyPatch};

mod token;
pub use self::token::{LoginForm, Token};

mod trade_bot;
pub use self::trade_bot::CreateTradeBot;

mod user;
pub use self::user::{Item, User};

mod validation;
pub use self::validation::{HttpValidationError, ValidationError};
