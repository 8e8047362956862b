use serde::{Deserialize, Serialize};

use rrt_rs::io::ext_repr::ExtSolution;

use crate::config::CliConfig;

/// Everything written to disk after a run: the scene, the grown tree, the path and the config used
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RunOutput {
    #[serde(flatten)]
    pub solution: ExtSolution,
    pub config: CliConfig,
}
