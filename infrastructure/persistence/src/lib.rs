pub mod db;
pub mod errors;
pub mod numeric;
pub mod address {
    pub mod entity;
    pub mod repository;
}
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod food {
    pub mod entity;
    pub mod repository;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
