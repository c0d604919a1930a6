pub mod user {
    pub mod model;
    pub mod service;
    pub mod store;
    pub mod handle;
    pub mod route;
}
