use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use bookworm_core::Clock;
use bookworm_core::model::AccountId;
use services::RosterService;
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::DashboardView;

#[derive(Clone)]
struct TestApp {
    roster: Arc<RosterService>,
}

impl UiApp for TestApp {
    fn roster(&self) -> Arc<RosterService> {
        Arc::clone(&self.roster)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn Harness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! {
        DashboardView {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(storage: Storage, account: AccountId) -> ViewHarness {
    let roster = Arc::new(RosterService::new(Clock::default(), account, storage));
    let app = Arc::new(TestApp { roster });
    let dom = VirtualDom::new_with_props(Harness, HarnessProps { app });
    ViewHarness { dom }
}
