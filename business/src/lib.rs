pub mod application {
    pub mod email {
        pub mod send_order_confirmation;
    }
    pub mod recommendation {
        pub mod list;
    }
}

pub mod domain {
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod email {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod send_order_confirmation;
        }
    }
    pub mod recommendation {
        pub mod engine;
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod list;
        }
    }
}
