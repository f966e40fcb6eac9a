use super::input::AppTextArea;
use super::output_log::OutputLog;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TerminalState<'a> {
    pub input: AppTextArea<'a>,
    pub output: OutputLog,
}
