//! 单元测试入口

mod dropdown_tests;
