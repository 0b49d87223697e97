#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    LoadingProject,
    CheckingCache,
    LoadingCachedResult,
    BuildingTable,
    SeedingThroat,
    Marching,
    SavingResults,
    Completed,
}

impl RunStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoadingProject => "loading project",
            Self::CheckingCache => "checking cache",
            Self::LoadingCachedResult => "loading cached result",
            Self::BuildingTable => "building flow table",
            Self::SeedingThroat => "seeding throat",
            Self::Marching => "marching characteristics",
            Self::SavingResults => "saving results",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunProgressEvent {
    pub stage: RunStage,
    pub elapsed_wall_s: f64,
    pub message: Option<String>,
}

impl RunProgressEvent {
    pub fn stage(stage: RunStage, elapsed_wall_s: f64, message: Option<String>) -> Self {
        Self {
            stage,
            elapsed_wall_s,
            message,
        }
    }
}
