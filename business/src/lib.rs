pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod storage;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod ordering;
        pub mod repository;
        pub mod snapshot;
        pub mod summary;
        pub mod value_objects;
    }
}
