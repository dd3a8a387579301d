/// What happens to a single cell on the next generation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mutation {
    Die,
    Stay,
    Born,
}

/// Conway's B3/S23 rule.
pub fn mutate(alive: bool, neighbours: usize) -> Mutation {
    match (alive, neighbours) {
        (false, 3) => Mutation::Born,
        (true, 2) | (true, 3) => Mutation::Stay,
        (true, _) => Mutation::Die,
        (false, _) => Mutation::Stay,
    }
}
