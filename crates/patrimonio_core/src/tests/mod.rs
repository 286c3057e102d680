mod aggregation;
mod milestones;
