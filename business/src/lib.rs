pub mod application {
    pub mod address {
        pub mod create;
        pub mod get_all;
    }
    pub mod cart {
        pub mod add_food;
        pub mod clear;
        pub mod get_cart;
        pub mod remove_entry;
    }
    pub mod food {
        pub mod get_by_id;
        pub mod update;
    }
    pub mod order {
        pub mod get_all;
        pub mod place;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod address {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_food;
            pub mod clear;
            pub mod get_cart;
            pub mod remove_entry;
        }
    }
    pub mod food {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod place;
        }
    }
}
