#[derive(Debug)]
pub enum CliModeResult {
    Finish,
    NothingToDo,
}
