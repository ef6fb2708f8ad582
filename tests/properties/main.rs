mod builder_tests;
mod roundtrip_tests;
