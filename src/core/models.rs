//! # Result Tree Module / 结果树模块
//!
//! This module defines the result tree at the heart of Suite Report.
//! A result node is either a leaf holding the outcome of a single test
//! case, or a named group (a suite) whose completion and pass state are
//! derived from its children.
//!
//! 此模块定义了 Suite Report 核心的结果树。
//! 结果节点要么是保存单个测试用例结果的叶子，
//! 要么是命名的分组（套件），其完成与通过状态由子结果派生。

use std::fmt;

/// A single frame of a captured call trace.
/// Frames are recorded by the test execution engine when a test throws,
/// ordered innermost first.
///
/// 捕获的调用栈中的单个栈帧。
/// 当测试抛出异常时由测试执行引擎记录，最内层在前。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFrame {
    /// Fully qualified path of the type or module the frame originated in.
    /// 栈帧来源的类型或模块的完整限定路径。
    pub origin: String,
    /// The function or method name at this frame.
    /// 此栈帧处的函数或方法名。
    pub function: String,
    /// The source line number.
    /// 源代码行号。
    pub line: u32,
}

impl TraceFrame {
    pub fn new(origin: impl Into<String>, function: impl Into<String>, line: u32) -> Self {
        Self {
            origin: origin.into(),
            function: function.into(),
            line,
        }
    }
}

/// The captured reason a leaf result did not pass: a human-readable
/// description plus the call trace recorded at the point of failure.
/// A leaf carrying a cause is never `completed` and never `passed`.
///
/// 叶子结果未通过的已捕获原因：人类可读的描述，
/// 以及失败发生时记录的调用栈。
/// 携带失败原因的叶子既不会是已完成，也不会是已通过。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureCause {
    description: String,
    trace: Vec<TraceFrame>,
}

impl FailureCause {
    /// Creates a cause with a description and no recorded trace.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            trace: Vec::new(),
        }
    }

    /// Creates a cause with a description and an already-collected trace.
    pub fn with_trace(description: impl Into<String>, trace: Vec<TraceFrame>) -> Self {
        Self {
            description: description.into(),
            trace,
        }
    }

    /// Appends a frame to the trace, outermost last.
    pub fn push_frame(&mut self, frame: TraceFrame) {
        self.trace.push(frame);
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn trace(&self) -> &[TraceFrame] {
        &self.trace
    }
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl From<anyhow::Error> for FailureCause {
    /// Captures the whole context chain as the description, with no trace.
    /// Engine code propagating `anyhow` errors can hand them over directly.
    fn from(err: anyhow::Error) -> Self {
        Self::new(format!("{err:#}"))
    }
}

/// A node of the result tree.
///
/// `Leaf` represents the outcome of one atomic test case; `Group`
/// represents a named suite of child results, in insertion order. All
/// aggregate state of a group (`passed`, `completed`, the counts) is
/// derived from its children on demand, never stored.
///
/// The three leaf fields are kept mutually consistent by the
/// constructors: a present `cause` forces `completed` and `passed` to
/// false, and an incomplete leaf is never passed. Build nodes through
/// [`ResultNode::leaf`], [`ResultNode::outcome`] and
/// [`ResultNode::group`] to preserve this.
///
/// 结果树的节点。
///
/// `Leaf` 表示单个原子测试用例的结果；`Group` 表示按插入顺序
/// 排列子结果的命名套件。分组的所有聚合状态（`passed`、`completed`
/// 和各项计数）均按需从子结果派生，从不存储。
///
/// 叶子的三个字段由构造函数保持一致：存在 `cause` 时
/// `completed` 与 `passed` 强制为 false，未完成的叶子不可能通过。
/// 请通过 [`ResultNode::leaf`]、[`ResultNode::outcome`] 和
/// [`ResultNode::group`] 构造节点以保持此约束。
#[derive(Debug, Clone, PartialEq)]
pub enum ResultNode {
    /// The outcome of a single test case.
    /// 单个测试用例的结果。
    Leaf {
        /// The test case name, used for identification in reports.
        /// 测试用例名称，用于在报告中进行识别。
        name: String,
        /// Whether the test ran to the end without throwing or aborting.
        /// 测试是否在没有抛出或中止的情况下运行到结束。
        completed: bool,
        /// Whether the test's assertions succeeded. Implies `completed`.
        /// 测试断言是否成功。蕴含 `completed`。
        passed: bool,
        /// Why the test did not pass, when the engine captured a reason.
        /// 测试未通过的原因（当引擎捕获到时）。
        cause: Option<FailureCause>,
    },
    /// A named suite of child results.
    /// 子结果的命名套件。
    Group {
        /// The suite name.
        /// 套件名称。
        name: String,
        /// Child results in insertion order.
        /// 按插入顺序排列的子结果。
        children: Vec<ResultNode>,
    },
}

impl ResultNode {
    /// Creates an empty named group.
    ///
    /// 创建一个空的命名分组。
    pub fn group(name: impl Into<String>) -> Self {
        ResultNode::Group {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Creates a leaf from a test case outcome, normalizing the flags so
    /// the three fields stay consistent: a present cause clears both
    /// `completed` and `passed`, and `passed` requires `completed`.
    ///
    /// 从测试用例结果创建叶子，并对标志进行归一化以保持三个字段一致：
    /// 存在失败原因时清除 `completed` 与 `passed`，
    /// 且 `passed` 要求 `completed`。
    pub fn leaf(
        name: impl Into<String>,
        completed: bool,
        passed: bool,
        cause: Option<FailureCause>,
    ) -> Self {
        // The three items MUST be consistent.
        let passed = passed && completed && cause.is_none();
        let completed = completed && cause.is_none();
        ResultNode::Leaf {
            name: name.into(),
            completed,
            passed,
            cause,
        }
    }

    /// Shorthand for a completed leaf with no failure cause.
    ///
    /// 已完成且无失败原因的叶子的简写。
    pub fn outcome(name: impl Into<String>, passed: bool) -> Self {
        Self::leaf(name, true, passed, None)
    }

    pub fn is_group(&self) -> bool {
        matches!(self, ResultNode::Group { .. })
    }

    pub fn name(&self) -> &str {
        match self {
            ResultNode::Leaf { name, .. } => name,
            ResultNode::Group { name, .. } => name,
        }
    }

    /// The failure cause, when this is a leaf that carries one.
    pub fn failure_cause(&self) -> Option<&FailureCause> {
        match self {
            ResultNode::Leaf { cause, .. } => cause.as_ref(),
            ResultNode::Group { .. } => None,
        }
    }

    /// The child results of a group, in insertion order.
    /// A leaf has no children and yields an empty slice.
    pub fn children(&self) -> &[ResultNode] {
        match self {
            ResultNode::Group { children, .. } => children,
            ResultNode::Leaf { .. } => &[],
        }
    }

    /// Appends a child result to this group.
    ///
    /// A group wrapping exactly one result is collapsed to that sole
    /// result before the append, repeatedly, so single-entry wrapper
    /// suites never appear in reports.
    ///
    /// 将子结果追加到此分组。
    ///
    /// 恰好包裹单个结果的分组会在追加前折叠为该结果（反复进行），
    /// 因此报告中不会出现只含一项的包装套件。
    ///
    /// # Panics
    ///
    /// Panics when called on a leaf. That is a bug in the caller building
    /// the tree, not a test failure, and fails fast.
    pub fn add_child(&mut self, mut node: ResultNode) {
        // Ignore wrapper groups holding a single result.
        loop {
            match node {
                ResultNode::Group {
                    children: mut wrapped,
                    ..
                } if wrapped.len() == 1 => {
                    node = wrapped.remove(0);
                }
                other => {
                    node = other;
                    break;
                }
            }
        }
        match self {
            ResultNode::Group { children, .. } => children.push(node),
            ResultNode::Leaf { name, .. } => {
                panic!("can only add children to a group: '{name}' is a leaf result")
            }
        }
    }

    /// Appends `node` only if it did not pass, for callers building a
    /// failures-only report. Returns whether it was appended.
    ///
    /// 仅当 `node` 未通过时才追加，供构建仅含失败项报告的调用者使用。
    /// 返回是否已追加。
    pub fn add_child_if_failed(&mut self, node: ResultNode) -> bool {
        if !node.passed() {
            self.add_child(node);
            return true;
        }
        false
    }

    /// The number of leaf results in this subtree.
    ///
    /// 此子树中叶子结果的数量。
    pub fn test_count(&self) -> usize {
        match self {
            ResultNode::Leaf { .. } => 1,
            ResultNode::Group { children, .. } => {
                children.iter().map(ResultNode::test_count).sum()
            }
        }
    }

    /// The number of completed leaf results in this subtree.
    ///
    /// 此子树中已完成叶子结果的数量。
    pub fn completed_count(&self) -> usize {
        match self {
            ResultNode::Leaf { completed, .. } => usize::from(*completed),
            ResultNode::Group { children, .. } => {
                children.iter().map(ResultNode::completed_count).sum()
            }
        }
    }

    /// The number of passed leaf results in this subtree.
    ///
    /// 此子树中已通过叶子结果的数量。
    pub fn passed_count(&self) -> usize {
        match self {
            ResultNode::Leaf { passed, .. } => usize::from(*passed),
            ResultNode::Group { children, .. } => {
                children.iter().map(ResultNode::passed_count).sum()
            }
        }
    }

    /// Whether every leaf in this subtree passed.
    /// Short-circuits on the first failing child.
    ///
    /// 此子树中的每个叶子是否都已通过。遇到第一个失败的子结果即短路。
    pub fn passed(&self) -> bool {
        match self {
            ResultNode::Leaf { passed, .. } => *passed,
            ResultNode::Group { children, .. } => children.iter().all(ResultNode::passed),
        }
    }

    /// Whether every leaf in this subtree completed.
    ///
    /// 此子树中的每个叶子是否都已完成。
    pub fn completed(&self) -> bool {
        match self {
            ResultNode::Leaf { completed, .. } => *completed,
            ResultNode::Group { children, .. } => children.iter().all(ResultNode::completed),
        }
    }
}

impl fmt::Display for ResultNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultNode::Leaf {
                name,
                completed,
                passed,
                cause,
            } => write!(
                f,
                "ResultNode{{{name}, completed={completed}, passed={passed}, cause={cause:?}}}"
            ),
            ResultNode::Group { name, .. } => write!(
                f,
                "ResultNode{{{name}, tests={}, completed={}, passed={}}}",
                self.test_count(),
                self.completed_count(),
                self.passed_count()
            ),
        }
    }
}
