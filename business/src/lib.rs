pub mod application {
    pub mod catalog {
        pub mod browse;
    }
    pub mod purchase {
        pub mod get_detail;
        pub mod get_history;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod session;
    pub mod catalog {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod browse;
        }
    }
    pub mod purchase {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_detail;
            pub mod get_history;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
