mod week_boundary_tests;
