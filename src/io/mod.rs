pub mod stats_file;
