//! Crate tests and test utils

/// Generate copies of tests for multiple client implementations
macro_rules! mk_tests {
    // Base case
    (
        tests {
            $( $tests:tt )*
        }
    ) => {};

    // Recurse for each module
    (
        tests {
            $( $tests:tt )*
        }

        $( #[$attr:meta] )*
        for $name:ident -> $type:ty {
            $( $connect:tt )*
        }

        $( $tail:tt )*
    ) => {
        $( #[$attr] )*
        mod $name {
            $( $tests )*

            fn connect() -> $type {
                $( $connect )*
            }
        }

        mk_tests! {
            tests {
                $( $tests )*
            }
            $( $tail )*
        }
    };
}

/// Generate copies of tests for the in memory client and,
/// when enabled, the native client implementations
macro_rules! mk_tests_default {
    ( $( $tests:tt )* ) => {
        mk_tests! {
            tests {
                $( $tests )*
            }

            for mock -> crate::Connection<crate::tests::mock::MockFbc> {
                crate::tests::mock::scenario_connection()
            }

            #[cfg(feature = "linking")]
            for linking -> crate::Connection<rsfrontbase_native::NativeFbcClient<rsfrontbase_native::FbcLinking>> {
                crate::builder_linked()
                    .with_string(crate::tests::test_url())
                    .expect("Invalid test connection string")
                    .connect()
                    .expect("Error on connect the test database")
            }

            #[cfg(feature = "dynamic_loading")]
            for dynamic_loading -> crate::Connection<rsfrontbase_native::NativeFbcClient<rsfrontbase_native::FbcDynLoading>> {
                crate::builder_dyn_load("libFBCAccess.so")
                    .with_string(crate::tests::test_url())
                    .expect("Invalid test connection string")
                    .connect()
                    .expect("Error on connect the test database")
            }
        }
    };
}

/// Connection string of the live test database
#[cfg(any(feature = "linking", feature = "dynamic_loading"))]
pub fn test_url() -> String {
    std::env::var("FRONTBASE_TEST_URL")
        .unwrap_or_else(|_| "frontbase://_system@localhost/test".to_string())
}


mod connection;
mod query;
