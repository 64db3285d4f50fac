pub mod load_project_list;

pub use load_project_list::LoadProjectList;
