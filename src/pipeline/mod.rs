// Pipeline orchestration: matching every grade and deriving coverage.

pub mod audit;
