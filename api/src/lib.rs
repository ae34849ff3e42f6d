pub mod bindings;
pub mod consts;
pub mod error;
pub mod instruction;
pub mod payout;
pub mod sdk;
pub mod state;

pub mod prelude {
    pub use crate::consts::*;
    pub use crate::error::*;
    pub use crate::instruction::*;
    pub use crate::payout::*;
    pub use crate::sdk::*;
    pub use crate::state::*;
}

use steel::*;

declare_id!("CuL3XoKRq2W7KU9ySarWJoNJfE8tfw3EjXjfmftVLm6b");
