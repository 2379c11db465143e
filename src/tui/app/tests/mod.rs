pub(crate) use super::*;
pub(crate) use crate::tui::test_utils::{make_app, render_panel_to_buffer};


pub(crate) const TWO_BUTTONS: &str = "ip:10.0.0.5:9000\n\
                                      title:Stage\n\
                                      button:Go:3:#FF0000:#FFFFFF\n\
                                      button:Stop:7:black:yellow\n";
