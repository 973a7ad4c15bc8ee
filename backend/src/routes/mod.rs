pub mod forest_map;
pub mod landing;
pub mod visitor_trends;
