pub mod color;
pub mod gray;
pub mod io;

pub use self::color::ColorImageU8;
pub use self::gray::GrayImageU8;
