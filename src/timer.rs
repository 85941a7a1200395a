//! 定时器队列 - 可取消的延迟动作
//! 时钟由宿主推进（毫秒），测试里可以确定性地模拟时间

/// 定时器句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

struct TimerEntry {
    id: TimerId,
    deadline_ms: u64,
}

/// 定时器队列
pub struct TimerQueue {
    now_ms: u64,
    next_id: u64,
    entries: Vec<TimerEntry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 1,
            entries: Vec::new(),
        }
    }

    /// 当前时刻（毫秒）
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// 登记一个 delay_ms 后到期的一次性定时器
    pub fn schedule(&mut self, delay_ms: u64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            deadline_ms: self.now_ms + delay_ms,
        });
        id
    }

    /// 取消定时器，返回是否还在排队
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// 推进时钟，返回到期的定时器（按到期先后）
    pub fn advance(&mut self, dt_ms: u64) -> Vec<TimerId> {
        self.now_ms += dt_ms;
        let now = self.now_ms;

        let mut fired: Vec<&TimerEntry> = self
            .entries
            .iter()
            .filter(|e| e.deadline_ms <= now)
            .collect();
        fired.sort_by_key(|e| e.deadline_ms);
        let fired: Vec<TimerId> = fired.into_iter().map(|e| e.id).collect();

        self.entries.retain(|e| e.deadline_ms > now);
        fired
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}
