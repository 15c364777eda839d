
// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the application:
// - grouping_tests: Properties of the grouping engine over whole event lists
// - smoke_tests: End-to-end checks of loading, grouping and rendering
