// 服务模块
// 提供核心业务逻辑服务

pub mod clock;
pub mod history;
pub mod samples;
pub mod session;
pub mod solver;

pub use clock::{Clock, ManualClock, TokioClock};

pub use history::{HistoryStore, SharedHistory};

pub use session::{ImageUpload, SolveInput, SolverSession};

pub use solver::{
    CannedSolver,
    Generation,
    GenerationWarning,
    RemoteSolver,
    SolutionGenerator,
    SolveRequest,
    SolverBackend,
};
