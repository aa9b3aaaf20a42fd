pub mod resolved_path;
