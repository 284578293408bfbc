#[derive(PartialEq, Debug, Clone)]
pub struct PathPush<Flow> {
    pub amount: Flow,
    pub total: Flow,
}

#[derive(PartialEq, Debug, Clone)]
pub struct PhaseTrace<Flow> {
    pub phase: usize,
    pub levels: Vec<Option<usize>>,
    pub pushes: Vec<PathPush<Flow>>,
}

impl<Flow> PhaseTrace<Flow> {
    pub fn new(phase: usize, levels: Vec<Option<usize>>) -> Self {
        Self { phase, levels, pushes: Vec::new() }
    }
}
