pub mod app_dirs;
