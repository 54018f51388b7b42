/// マスの静的評価表で手を選ぶAI。
pub mod positional;
/// 合法手からランダムに1手選ぶAI。
pub mod random;
pub mod types;
