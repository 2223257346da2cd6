pub mod critical_path;
pub mod procurement;
pub mod resources;
