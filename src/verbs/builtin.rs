// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in list of accepted imperative verbs.
//!
//! Frequent English verbs plus the ones that show up in commit subjects all
//! the time. Every entry is lowercase.

/// Verbs accepted without any configuration.
pub const FREQUENT_VERBS: &[&str] = &[
    "abandon", "accelerate", "accept", "access", "accommodate", "accompany", "accomplish",
    "account", "accumulate", "accuse", "achieve", "acknowledge", "acquire", "act", "activate",
    "adapt", "add", "address", "adjust", "administer", "admit", "adopt", "advance", "advertise",
    "advise", "advocate", "affect", "afford", "aggregate", "agree", "aim", "alert", "align",
    "allocate", "allow", "alter", "amend", "analyse", "analyze", "animate", "annotate",
    "announce", "answer", "anticipate", "append", "apply", "appoint", "appreciate", "approach",
    "approve", "archive", "argue", "arise", "arrange", "arrest", "arrive", "articulate", "ask",
    "assemble", "assert", "assess", "assign", "assist", "associate", "assume", "assure",
    "attach", "attack", "attempt", "attend", "attract", "audit", "augment", "authenticate",
    "authorize", "automate", "avoid", "await", "award", "back", "backport", "bake", "balance",
    "ban", "base", "batch", "be", "bear", "beat", "become", "begin", "behave", "believe",
    "belong", "bench", "benchmark", "bind", "blacklist", "blame", "block", "boost", "borrow",
    "bother", "bound", "box", "break", "bring", "broadcast", "browse", "buffer", "build",
    "bump", "bundle", "burn", "buy", "bypass", "cache", "calculate", "call", "cancel",
    "capitalize", "capture", "care", "carry", "cast", "catch", "cause", "center", "centralize",
    "certify", "chain", "challenge", "change", "charge", "chase", "check", "choose", "cite",
    "claim", "clamp", "clarify", "classify", "clean", "cleanup", "clear", "click", "clip",
    "clone", "close", "cluster", "coalesce", "code", "collapse", "collect", "color", "colour",
    "combine", "come", "comment", "commit", "communicate", "compact", "compare", "compensate",
    "compile", "complain", "complete", "comply", "compose", "compress", "compute",
    "concatenate", "conclude", "conduct", "configure", "confirm", "conform", "connect",
    "consider", "consolidate", "constrain", "construct", "consult", "consume", "contact",
    "contain", "continue", "contribute", "control", "convert", "convey", "cook", "coordinate",
    "copy", "correct", "cost", "count", "couple", "cover", "crash", "create", "credit", "crop",
    "cross", "cut", "damage", "deal", "debounce", "debug", "decide", "declare", "decode",
    "decompose", "decorate", "decouple", "decrease", "decrypt", "dedupe", "deduplicate",
    "default", "defend", "defer", "define", "delay", "delegate", "delete", "deliver", "demand",
    "demonstrate", "denote", "deny", "deploy", "deprecate", "derive", "describe", "deserialize",
    "design", "destroy", "detach", "detect", "determine", "develop", "die", "differ",
    "differentiate", "dim", "disable", "disallow", "discard", "disconnect", "discover",
    "discuss", "dismiss", "dispatch", "display", "dispose", "distinguish", "distribute", "dive",
    "divide", "do", "document", "double", "downgrade", "download", "draft", "drag", "draw",
    "dream", "drink", "drive", "drop", "dry", "dump", "duplicate", "earn", "ease", "edit",
    "educate", "effect", "elaborate", "elect", "eliminate", "embed", "emerge", "emit",
    "emphasize", "employ", "empty", "emulate", "enable", "encapsulate", "encode", "encounter",
    "encourage", "encrypt", "end", "enforce", "engage", "enhance", "enjoy", "enlarge",
    "enqueue", "ensure", "enter", "entitle", "enumerate", "equip", "escalate", "escape",
    "establish", "estimate", "evaluate", "evict", "examine", "exceed", "exchange", "exclude",
    "execute", "exercise", "exist", "exit", "expand", "expect", "experience", "experiment",
    "explain", "explore", "export", "expose", "express", "extend", "extract", "face",
    "facilitate", "fail", "fall", "fear", "feature", "feed", "feel", "fetch", "fight", "fill",
    "filter", "finalize", "finance", "find", "finish", "fire", "fit", "fix", "flag", "flatten",
    "flip", "flush", "fold", "follow", "force", "forget", "fork", "form", "format", "forward",
    "found", "free", "freeze", "fulfil", "fulfill", "gain", "gather", "generalize", "generate",
    "get", "give", "go", "govern", "grab", "grant", "greet", "group", "grow", "guarantee",
    "guard", "guess", "guide", "halt", "handle", "hang", "happen", "harden", "hash", "have",
    "head", "hear", "help", "hide", "highlight", "hint", "hire", "hit", "hoist", "hold", "hook",
    "host", "hurt", "identify", "ignore", "illustrate", "implement", "import", "impose",
    "improve", "include", "incorporate", "increase", "increment", "indent", "indicate",
    "influence", "inform", "inherit", "initialise", "initialize", "inject", "inline", "insert",
    "insist", "inspect", "install", "instantiate", "instruct", "integrate", "intend",
    "interact", "intercept", "interpret", "introduce", "invalidate", "invert", "investigate",
    "invite", "invoke", "involve", "isolate", "issue", "iterate", "join", "judge", "jump",
    "justify", "keep", "kill", "know", "label", "land", "last", "launch", "lay", "lead",
    "learn", "leave", "lend", "let", "level", "lift", "limit", "link", "lint", "list", "listen",
    "live", "load", "localize", "locate", "lock", "log", "look", "loop", "lose", "love",
    "lower", "maintain", "make", "manage", "manipulate", "map", "mark", "match", "matter",
    "mean", "measure", "meet", "memoize", "mention", "merge", "migrate", "mind", "minimize",
    "mirror", "miss", "mitigate", "mock", "modify", "monitor", "mount", "move", "multiply",
    "mute", "name", "narrow", "navigate", "need", "negotiate", "nest", "normalize", "note",
    "notice", "notify", "observe", "obtain", "occupy", "occur", "offer", "omit", "open",
    "operate", "optimise", "optimize", "order", "organise", "organize", "orient", "output",
    "overcome", "override", "overwrite", "own", "pack", "pad", "paginate", "paint",
    "parallelize", "parameterize", "parse", "partition", "pass", "patch", "pause", "pay",
    "perform", "permit", "persist", "pick", "pin", "place", "plan", "play", "plot", "point",
    "polish", "poll", "populate", "port", "position", "possess", "post", "postpone", "predict",
    "prefer", "prefix", "prepare", "prepend", "present", "preserve", "press", "prevent",
    "print", "prioritize", "process", "produce", "profile", "program", "prohibit", "promote",
    "prompt", "propagate", "propose", "protect", "prove", "provide", "prune", "publish", "pull",
    "purge", "push", "put", "qualify", "query", "queue", "quote", "raise", "reach", "react",
    "read", "realize", "rearrange", "reason", "rebase", "rebuild", "recall", "receive",
    "recognize", "recommend", "reconcile", "record", "recover", "recreate", "redefine",
    "redesign", "redirect", "reduce", "refactor", "refer", "refine", "reflect", "reformat",
    "refresh", "refuse", "register", "reimplement", "reject", "relate", "relax", "release",
    "reload", "rely", "remain", "remember", "remind", "remove", "rename", "render", "reorder",
    "reorganize", "repair", "repeat", "rephrase", "replace", "reply", "report", "represent",
    "request", "require", "reset", "reshape", "resize", "resolve", "respect", "respond",
    "restart", "restore", "restrict", "restructure", "retain", "retire", "retrieve", "retry",
    "return", "reuse", "reveal", "revert", "review", "revise", "revisit", "revoke", "rework",
    "rewrite", "rid", "ride", "ring", "rise", "roll", "rotate", "round", "route", "run",
    "sanitize", "satisfy", "save", "say", "scale", "scan", "schedule", "scope", "score",
    "scroll", "seal", "search", "secure", "see", "seek", "seem", "select", "sell", "send",
    "separate", "serialize", "serve", "set", "settle", "share", "shift", "ship", "shorten",
    "show", "shrink", "shuffle", "shut", "sign", "silence", "simplify", "simulate", "sing",
    "sit", "size", "skip", "sleep", "slice", "slow", "smooth", "snapshot", "solve", "sort",
    "sound", "spawn", "speak", "specify", "speed", "spell", "spend", "split", "sponsor",
    "spread", "squash", "stabilize", "stage", "stand", "standardize", "start", "state", "stay",
    "steal", "step", "stick", "stop", "store", "stream", "strengthen", "stress", "stretch",
    "strike", "strip", "structure", "study", "style", "submit", "subscribe", "substitute",
    "subtract", "succeed", "suffer", "suggest", "suit", "summarize", "supply", "support",
    "suppress", "surface", "surround", "suspend", "swallow", "swap", "switch", "sync",
    "synchronize", "tackle", "take", "talk", "target", "teach", "tear", "tell", "tend",
    "terminate", "test", "thank", "think", "throttle", "throw", "tidy", "tie", "tighten",
    "toggle", "touch", "trace", "track", "train", "transfer", "transform", "translate",
    "transmit", "trap", "travel", "treat", "trigger", "trim", "truncate", "trust", "try",
    "tune", "turn", "tweak", "type", "uncomment", "understand", "undo", "unify", "uninstall",
    "union", "unlock", "unpack", "unpin", "unregister", "unset", "unskip", "untangle", "unwrap",
    "update", "upgrade", "upload", "use", "utilize", "validate", "value", "vary", "vendor",
    "verify", "view", "visit", "vote", "wait", "walk", "want", "warn", "wash", "watch",
    "weaken", "wear", "whitelist", "widen", "win", "wipe", "wish", "withdraw", "wonder", "work",
    "wrap", "write", "yield", "zip",
];
