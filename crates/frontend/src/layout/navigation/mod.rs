pub mod nav;
pub mod nav_link;

pub use nav::Nav;
pub use nav_link::NavLink;
