pub mod resolution_planner;

pub use resolution_planner::ResolutionPlanner;
