pub mod bfs_data;
