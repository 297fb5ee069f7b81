pub mod modules {
    pub mod transactions {
        pub mod core {
            pub mod transaction;
        }
        pub mod use_cases {
            pub mod record_transaction {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_transaction {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod transaction_store;
                pub mod transaction_store_in_memory;
            }
        }
    }
}

pub mod load_test {
    pub mod client;
    pub mod mocked_data;
    pub mod runner;
}

pub mod shell;
