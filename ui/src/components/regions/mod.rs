mod assign_region_modal;
mod region_assignment_table;
mod region_filters;
mod region_stats;

pub use assign_region_modal::AssignRegionModal;
pub use region_assignment_table::RegionAssignmentTable;
pub use region_filters::RegionFiltersPanel;
pub use region_stats::RegionStatsCards;
