use crate::app::event::SubmissionSeq;
use crate::app::state::FormData;

#[derive(Debug, PartialEq)]
pub enum Action {
    SendMail { seq: SubmissionSeq, payload: FormData },
    Quit,
}
