//! Built-in fallback word list
//!
//! A small mixed-length dictionary so the binary works without a word file.
//! Pass `--dict <path>` to use a real one.

/// Default dictionary, lengths 3 through 6
pub const SAMPLE_WORDS: &[&str] = &[
    // 3 letters
    "act", "add", "age", "ago", "aid", "aim", "air", "all", "and", "ant",
    "any", "arm", "art", "ask", "bad", "bag", "bat", "bed", "bee", "big",
    "bit", "box", "boy", "bus", "but", "buy", "can", "cap", "car", "cat",
    "cow", "cry", "cup", "cut", "day", "dog", "dry", "ear", "eat", "egg",
    "end", "eye", "fan", "far", "fat", "few", "fit", "fly", "fog", "for",
    "fox", "fun", "gas", "get", "got", "gun", "hat", "hen", "hit", "hot",
    "ice", "ink", "jam", "jar", "job", "key", "kid", "law", "leg", "let",
    "lip", "log", "low", "man", "map", "mat", "mix", "mud", "net", "new",
    "now", "nut", "oak", "odd", "oil", "old", "one", "out", "owl", "own",
    "pan", "pen", "pet", "pig", "pin", "pot", "put", "rat", "raw", "red",
    "rib", "rod", "row", "run", "sad", "sat", "saw", "sea", "see", "set",
    "she", "shy", "sit", "six", "sky", "son", "sun", "tap", "tea", "ten",
    "the", "tie", "tin", "tip", "toe", "top", "toy", "try", "two", "use",
    "van", "war", "was", "wax", "way", "web", "wet", "who", "why", "win",
    "yes", "yet", "zoo",
    // 4 letters
    "able", "acid", "aunt", "away", "baby", "back", "ball", "band", "bank",
    "barn", "bath", "bear", "beat", "bell", "belt", "bend", "bird", "blow",
    "blue", "boat", "bone", "book", "born", "both", "bowl", "burn", "bush",
    "busy", "cake", "calf", "call", "calm", "camp", "card", "care", "cart",
    "case", "cash", "cave", "cell", "chin", "city", "clay", "club", "coal",
    "coat", "coin", "cold", "cook", "cool", "cord", "corn", "cost", "crew",
    "crop", "dark", "date", "dawn", "deep", "deer", "desk", "dish", "door",
    "down", "draw", "drop", "drum", "dust", "duty", "each", "east", "easy",
    "edge", "face", "fact", "fall", "farm", "fast", "fear", "feed", "feel",
    "fill", "find", "fire", "fish", "five", "flag", "flat", "flow", "fold",
    "food", "foot", "fork", "form", "four", "free", "frog", "fuel", "full",
    "game", "gate", "gift", "girl", "give", "glad", "goat", "gold", "good",
    "gray", "grew", "grow", "hair", "half", "hall", "hand", "hang", "hard",
    "harm", "heat", "help", "herd", "hill", "hold", "hole", "home", "hope",
    "horn", "hour", "huge", "hunt", "iron", "join", "jump", "keep", "kind",
    "king", "knee", "knot", "know", "lake", "lamb", "lamp", "land", "last",
    "late", "lawn", "lead", "leaf", "lean", "left", "life", "lift", "lime",
    "line", "lion", "list", "load", "lock", "long", "look", "loud", "love",
    "luck", "mail", "main", "make", "many", "mark", "mass", "meal", "mean",
    "meat", "milk", "mind", "mine", "miss", "moon", "more", "most", "move",
    "much", "must", "nail", "name", "near", "neck", "need", "nest", "news",
    "next", "nine", "none", "noon", "nose", "note", "noun", "only", "open",
    "oven", "over", "page", "pain", "pair", "palm", "park", "part", "pass",
    "past", "path", "peak", "pear", "pick", "pile", "pine", "pink", "plan",
    "play", "plow", "pond", "pool", "poor", "pull", "push", "race", "rain",
    "rank", "rate", "read", "rear", "rent", "rest", "rice", "rich", "ride",
    "ring", "rise", "road", "rock", "roll", "roof", "room", "root", "rope",
    "rose", "rule", "rush", "safe", "sail", "salt", "sand", "save", "seat",
    "seed", "sell", "send", "shed", "ship", "shoe", "shop", "show", "sick",
    "side", "sign", "silk", "sing", "sink", "site", "size", "skin", "slip",
    "slow", "snow", "soap", "soft", "soil", "sold", "some", "song", "soon",
    "sort", "soup", "spin", "spot", "star", "stay", "stem", "step", "stop",
    "such", "suit", "sure", "swim", "tail", "take", "talk", "tall", "tank",
    "task", "team", "tell", "tent", "test", "than", "that", "them", "then",
    "they", "thin", "this", "tide", "time", "tiny", "tool", "town", "tree",
    "trip", "turn", "twin", "unit", "upon", "vast", "very", "view", "vote",
    "wage", "wait", "wake", "walk", "wall", "want", "warm", "wash", "wave",
    "weak", "wear", "week", "well", "west", "what", "when", "whip", "wide",
    "wife", "wind", "wine", "wing", "wire", "wise", "wish", "with", "wood",
    "wool", "word", "work", "yard", "year", "zero", "zone",
    // 5 letters
    "about", "above", "actor", "after", "again", "agent", "agree", "ahead",
    "alarm", "alike", "alive", "allow", "alone", "along", "among", "angle",
    "angry", "apart", "apple", "apply", "arena", "argue", "arise", "armor",
    "arrow", "aside", "avoid", "awake", "award", "aware", "badge", "baker",
    "basic", "basin", "beach", "beard", "beast", "begin", "being", "below",
    "bench", "berry", "birth", "black", "blade", "blame", "blank", "blast",
    "blind", "block", "blood", "board", "boost", "bound", "brain", "brake",
    "brand", "brave", "bread", "break", "brick", "bride", "brief", "bring",
    "broad", "brook", "brown", "brush", "build", "burst", "cabin", "cable",
    "candy", "carry", "catch", "cause", "chain", "chair", "chalk", "charm",
    "chart", "chase", "cheap", "check", "chest", "chief", "child", "claim",
    "clash", "class", "clean", "clear", "climb", "clock", "close", "cloth",
    "cloud", "coach", "coast", "color", "count", "court", "cover", "crack",
    "craft", "crane", "crash", "crate", "cream", "crime", "cross", "crowd",
    "crown", "curve", "cycle", "daily", "dance", "death", "depth", "dirty",
    "doubt", "dozen", "draft", "drain", "drama", "dream", "dress", "drink",
    "drive", "eager", "eagle", "early", "earth", "eight", "elbow", "empty",
    "enemy", "enjoy", "enter", "equal", "error", "event", "every", "exact",
    "exist", "extra", "faint", "faith", "false", "fancy", "fault", "favor",
    "feast", "fence", "fever", "field", "fifth", "fight", "final", "first",
    "flame", "flash", "fleet", "flesh", "float", "flood", "floor", "flour",
    "focus", "force", "forth", "found", "frame", "fresh", "front", "frost",
    "fruit", "giant", "glass", "globe", "glory", "glove", "grace", "grade",
    "grain", "grand", "grant", "grape", "grass", "grate", "great", "green",
    "greet", "group", "guard", "guess", "guest", "guide", "habit", "happy",
    "harsh", "heart", "heavy", "hedge", "hello", "honey", "honor", "horse",
    "hotel", "house", "human", "hurry", "ideal", "image", "index", "inner",
    "input", "irate", "issue", "jewel", "joint", "judge", "juice", "knife",
    "knock", "label", "labor", "large", "laugh", "layer", "learn", "least",
    "leave", "legal", "lemon", "level", "light", "limit", "local", "loose",
    "lower", "loyal", "lucky", "lunch", "magic", "major", "maple", "march",
    "match", "metal", "might", "minor", "model", "money", "month", "moral",
    "motor", "mount", "mouse", "mouth", "music", "naval", "nerve", "never",
    "night", "noble", "noise", "north", "novel", "nurse", "ocean", "offer",
    "often", "onion", "orbit", "order", "organ", "other", "ought", "outer",
    "owner", "paint", "panel", "paper", "party", "patch", "pause", "peace",
    "pearl", "phase", "piece", "pilot", "pitch", "place", "plain", "plane",
    "plant", "plate", "point", "pound", "power", "press", "price", "pride",
    "prime", "print", "prize", "proof", "proud", "prove", "pupil", "queen",
    "quick", "quiet", "quite", "radio", "raise", "range", "rapid", "reach",
    "ready", "rider", "ridge", "right", "river", "robin", "rough", "round",
    "route", "royal", "rural", "scale", "scene", "scope", "score", "sense",
    "serve", "seven", "shade", "shake", "shall", "shape", "share", "sharp",
    "sheep", "sheet", "shelf", "shell", "shift", "shine", "shirt", "shock",
    "shoot", "shore", "short", "shout", "sight", "silly", "since", "sixth",
    "skill", "skirt", "slate", "sleep", "slice", "slide", "slope", "small",
    "smart", "smell", "smile", "smoke", "snake", "solid", "solve", "sound",
    "south", "space", "spare", "speak", "speed", "spell", "spend", "spite",
    "split", "sport", "stack", "staff", "stage", "stair", "stamp", "stand",
    "start", "state", "steam", "steel", "steep", "stick", "still", "stock",
    "stone", "store", "storm", "story", "stove", "strip", "study", "stuff",
    "sugar", "sweet", "swing", "sword", "table", "taste", "teach", "thank",
    "theme", "there", "thick", "thing", "think", "third", "three", "throw",
    "tiger", "tight", "title", "today", "tooth", "touch", "tower", "trace",
    "track", "trade", "trail", "train", "treat", "trend", "trial", "trick",
    "truck", "trust", "truth", "twice", "uncle", "under", "union", "until",
    "upper", "urban", "usual", "valid", "value", "visit", "vital", "voice",
    "waste", "watch", "water", "wheat", "where", "which", "while", "white",
    "whole", "whose", "woman", "world", "worry", "worth", "would", "wound",
    "write", "wrong", "young", "youth",
    // 6 letters
    "absorb", "accept", "access", "across", "action", "active", "advice",
    "affair", "afford", "agency", "almost", "always", "amount", "animal",
    "answer", "anyone", "appeal", "appear", "around", "arrive", "artist",
    "aspect", "assist", "assume", "attack", "attend", "august", "author",
    "autumn", "avenue", "banana", "barrel", "basket", "battle", "beauty",
    "become", "before", "behalf", "behind", "belief", "belong", "better",
    "beyond", "bishop", "border", "borrow", "bottle", "bottom", "branch",
    "breath", "bridge", "bright", "broken", "bronze", "budget", "burden",
    "bureau", "button", "camera", "cancer", "carbon", "career", "castle",
    "casual", "cattle", "caught", "center", "chance", "change", "charge",
    "choice", "choose", "chosen", "church", "circle", "client", "closed",
    "cloudy", "coffee", "column", "combat", "coming", "common", "copper",
    "corner", "cotton", "county", "couple", "course", "cousin", "create",
    "credit", "crisis", "custom", "damage", "danger", "debate", "decade",
    "decide", "defeat", "defend", "define", "degree", "demand", "depend",
    "deputy", "desert", "design", "desire", "detail", "detect", "device",
    "dinner", "direct", "doctor", "dollar", "domain", "double", "driver",
    "during", "easily", "eating", "editor", "effect", "effort", "eighth",
    "either", "eleven", "emerge", "empire", "employ", "enable", "ending",
    "energy", "engage", "engine", "enough", "ensure", "entire", "entity",
    "escape", "estate", "ethnic", "exceed", "except", "excess", "expand",
    "expect", "expert", "export", "extend", "extent", "fabric", "facing",
    "factor", "fairly", "fallen", "family", "famous", "farmer", "father",
    "fellow", "female", "figure", "filter", "finger", "finish", "flight",
    "flower", "flying", "follow", "forest", "forget", "formal", "format",
    "former", "foster", "fourth", "freeze", "friend", "frozen", "future",
    "garden", "gather", "gender", "gentle", "global", "golden", "ground",
    "growth", "guilty", "handle", "happen", "hardly", "hatred", "having",
    "health", "height", "hidden", "holder", "honest", "horror", "hunger",
    "hungry", "hunter", "impact", "import", "income", "indeed", "inside",
    "intend", "invest", "island", "itself", "jacket", "junior", "killer",
    "kidney", "lately", "latter", "launch", "lawyer", "leader", "league",
    "legacy", "legend", "length", "lesson", "letter", "likely", "liquid",
    "listen", "little", "living", "locate", "lonely", "losing", "lovely",
    "luxury", "mainly", "makeup", "manage", "manner", "marble", "margin",
    "marine", "marker", "market", "master", "matter", "mature", "medium",
    "member", "memory", "mental", "merely", "method", "middle", "minute",
    "mirror", "mobile", "modern", "modest", "moment", "monkey", "mostly",
    "mother", "motion", "murder", "muscle", "museum", "mutual", "myself",
    "narrow", "nation", "native", "nature", "nearby", "nearly", "nobody",
    "normal", "notice", "notion", "number", "object", "obtain", "occupy",
    "office", "online", "option", "orange", "origin", "outfit", "output",
    "oxygen", "palace", "parent", "partly", "patent", "people", "pepper",
    "period", "permit", "person", "phrase", "picked", "planet", "player",
    "please", "plenty", "pocket", "poetry", "police", "policy", "potato",
    "powder", "prefer", "pretty", "priest", "prince", "prison", "profit",
    "proper", "public", "purple", "pursue", "rabbit", "racial", "random",
    "rarely", "rather", "reader", "really", "reason", "recall", "recent",
    "recipe", "record", "reduce", "reform", "refuse", "regard", "regime",
    "region", "reject", "relate", "relief", "remain", "remote", "remove",
    "repair", "repeat", "report", "rescue", "resist", "resort", "result",
    "retail", "retain", "retire", "return", "reveal", "review", "reward",
    "ribbon", "riding", "rising", "ritual", "robust", "rocket", "ruling",
    "safety", "salary", "sample", "saving", "scheme", "school", "screen",
    "search", "season", "second", "secret", "sector", "secure", "seldom",
    "select", "senior", "series", "settle", "severe", "shadow", "shaped",
    "shower", "signal", "silent", "silver", "simple", "simply", "singer",
    "single", "sister", "sleeve", "slight", "smooth", "soccer", "social",
    "sodium", "solely", "sought", "source", "speech", "spirit", "spread",
    "spring", "square", "stable", "statue", "status", "steady", "stolen",
    "strain", "stream", "street", "stress", "strict", "strike", "string",
    "strong", "studio", "submit", "subtle", "suburb", "sudden", "suffer",
    "summer", "summit", "supply", "surely", "survey", "switch", "symbol",
    "system", "talent", "target", "tender", "tennis", "theory", "thirty",
    "thread", "threat", "thrown", "ticket", "timber", "tissue", "toward",
    "travel", "treaty", "trophy", "tunnel", "turtle", "twelve", "twenty",
    "unable", "unique", "united", "unless", "unlike", "update", "useful",
    "valley", "vendor", "verbal", "versus", "victim", "viewer", "virtue",
    "vision", "visual", "volume", "wealth", "weapon", "weekly", "weight",
    "window", "winner", "winter", "wisdom", "within", "wonder", "wooden",
    "worker", "writer", "yellow",
];
