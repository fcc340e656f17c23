pub mod modules {
    pub mod fleet {
        pub mod core {
            pub mod car;
            pub mod fuel_entry;
            pub mod fuel_stats;
        }
        pub mod application {
            pub mod errors;
        }
        pub mod use_cases {
            pub mod create_car {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_cars {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod add_fuel_entry {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_fuel_stats {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod fleet_store;
                pub mod fleet_store_in_memory;
            }
        }
    }
}

pub mod client;
pub mod shell;
