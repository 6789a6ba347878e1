pub mod decode;
pub mod encode;
pub mod int;
pub mod list;
