use console::{style, Term};
use std::time::Instant;

pub struct TaskRunner {
    term: Term,
    num_tasks: u32,
    current_task: u32,
    now: Instant,
    descr: String,
    verbose: bool,
    started: bool,
}

impl TaskRunner {
    pub fn new(num_tasks: u32, verbose: bool) -> Self {
        Self {
            term: Term::stdout(),
            num_tasks,
            current_task: 0,
            now: Instant::now(),
            descr: "".into(),
            verbose,
            started: false,
        }
    }

    fn task_id(&self) -> String {
        style(format!("[{}/{}]", self.current_task + 1, self.num_tasks))
            .force_styling(true)
            .to_string()
    }

    pub fn start_task(&mut self, descr: impl Into<String>) {
        if self.started {
            self.finish_task(Status::Skipped, true);
        }
        self.now = Instant::now();
        self.descr = descr.into();
        self.started = true;
        println!("{} {}", self.task_id(), &self.descr);
    }

    fn finish_task(&mut self, status: Status, clear_last: bool) {
        self.started = false;
        if clear_last {
            self.term.clear_last_lines(1).ok();
        }
        let status = match status {
            Status::Skipped => "[SKIPPED]".to_string(),
            Status::Failed => style("[FAILED]").red().to_string(),
            Status::Done => format!("[{}ms]", self.now.elapsed().as_millis()),
        };
        println!("{} {} {}", self.task_id(), &self.descr, status);
        self.current_task += 1;
    }

    pub fn end_task(&mut self) {
        self.finish_task(Status::Done, !self.verbose);
    }

    pub fn fail_task(&mut self) {
        self.finish_task(Status::Failed, !self.verbose);
    }
}

#[derive(Clone, Copy)]
enum Status {
    Done,
    Failed,
    Skipped,
}
