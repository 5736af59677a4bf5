use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum SeqErr {
    #[error("[Gen] Step must not be zero")]
    ZeroStep,

    #[error("[Input] Open input file `{file}` error: {err}")]
    OpenFileErr { file: String, err: String },
}
