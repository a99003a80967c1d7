mod metadata_service_tests;
