//! End-to-end: a panel file on disk drives OSC requests to a local receiver.

use osc_macro_panel::osc::exec_request;
use osc_macro_panel::{MacroSink, PanelLoader, UdpSink};
use std::fs;
use std::time::Duration;
use tokio::net::UdpSocket;

#[tokio::test]
async fn every_button_sends_its_own_macro() {
    let receiver = UdpSocket::bind("127.0.0.1:0")
        .await
        .expect("failed to bind receiver");
    let port = receiver.local_addr().expect("receiver addr").port();

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("panel.txt");
    fs::write(
        &path,
        format!(
            "ip:127.0.0.1:{port}\ntitle:Booth\nbutton:Intro:1:navy:white\nnewline\n\
             empty\nbutton:Outro:12:#FF8800:black\n"
        ),
    )
    .expect("failed to write panel");

    let panel = PanelLoader::load_from_path(&path).expect("panel should load");
    assert_eq!(panel.layout.title(), Some("Booth"));

    let sink = UdpSink::bind(&panel.destination, 0)
        .await
        .expect("sink should bind");
    for (_, _, button) in panel.layout.buttons() {
        sink.send(panel.destination, button.macro_index)
            .await
            .expect("send should succeed");
    }

    let mut buf = [0u8; 128];
    for expected in [1u32, 12] {
        let (len, _) = tokio::time::timeout(Duration::from_secs(2), receiver.recv_from(&mut buf))
            .await
            .expect("receiver timed out")
            .expect("recv failed");
        assert_eq!(&buf[..len], exec_request(expected).encode().as_slice());
    }
}
