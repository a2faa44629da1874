//! Example code block update handlers

use crate::commands::Cmd;
use crate::messages::{CodeMsg, Msg};
use crate::model::{PageModel, COPY_FEEDBACK_MS};

/// Handle code block messages
pub fn update_code_block(model: &mut PageModel, msg: CodeMsg) -> Option<Cmd> {
    match msg {
        CodeMsg::Copy => {
            let text = match model.device() {
                Some(device) => device.example_code.clone(),
                None => {
                    tracing::debug!("Copy requested with no device loaded");
                    return None;
                }
            };
            let seq = model.code.mark_copied();
            Some(Cmd::batch(vec![
                Cmd::CopyToClipboard { text },
                Cmd::ScheduleTimer {
                    delay_ms: COPY_FEEDBACK_MS,
                    msg: Box::new(Msg::Code(CodeMsg::CopyFeedbackExpired { seq })),
                },
            ]))
        }
        CodeMsg::CopyFeedbackExpired { seq } => {
            if !model.code.expire(seq) {
                tracing::debug!("Ignoring expired feedback timer for copy {}", seq);
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Device, LoadState};
    use std::rc::Rc;

    fn ready_model() -> PageModel {
        let device = Device::from_json(r#"{ "name": "B", "exampleCode": "int x = 1;" }"#).unwrap();
        let mut model = PageModel::new();
        model.load = LoadState::Ready {
            key: "b".to_string(),
            device: Rc::new(device),
        };
        model
    }

    #[test]
    fn test_copy_schedules_reset() {
        let mut model = ready_model();
        let cmds = update_code_block(&mut model, CodeMsg::Copy)
            .unwrap()
            .flatten();
        assert!(model.code.copied);
        assert!(matches!(&cmds[0], Cmd::CopyToClipboard { text } if text == "int x = 1;"));
        assert!(matches!(
            &cmds[1],
            Cmd::ScheduleTimer { delay_ms: 2000, msg }
                if matches!(**msg, Msg::Code(CodeMsg::CopyFeedbackExpired { seq: 1 }))
        ));
    }

    #[test]
    fn test_copy_without_device_does_nothing() {
        let mut model = PageModel::new();
        assert!(update_code_block(&mut model, CodeMsg::Copy).is_none());
        assert!(!model.code.copied);
    }
}
