pub mod home;        // /
pub mod build;       // /build
pub mod browse;      // /parts/browse and its four child lists
pub mod part_info;   // /parts/:partType/:id
pub mod cart;        // /cart
pub mod not_found;
