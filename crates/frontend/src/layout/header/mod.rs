pub mod header;
pub mod header_row;
pub mod icon;
pub mod title;

pub use header::Header;
pub use header_row::HeaderRow;
pub use icon::Icon;
pub use title::Title;
