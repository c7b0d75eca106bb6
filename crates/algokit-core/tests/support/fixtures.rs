// crates/algokit-core/tests/support/fixtures.rs
// ============================================================================
// Module: Test Fixtures
// Description: Small textbook graphs and data sets in their text formats.
// ============================================================================
//! Fixture texts are parsed with the library's own readers, so every graph
//! test also exercises the text formats.

/// Undirected graph with three components (13 vertices, 13 edges).
pub const TINY_G: &str = "\
13
13
0 5
4 3
0 1
9 12
6 4
5 4
0 2
11 12
9 10
0 6
7 8
9 11
5 3
";

/// Six-vertex graph used for path comparisons.
pub const TINY_CG: &str = "\
6
8
0 5
2 4
2 3
1 2
0 1
3 4
3 5
0 2
";

/// Digraph with five strong components.
pub const TINY_DG: &str = "\
13
22
 4  2
 2  3
 3  2
 6  0
 0  1
 2  0
11 12
12  9
 9 10
 9 11
 8  9
10 12
11  4
 4  3
 3  5
 7  8
 8  7
 5  4
 0  5
 6  4
 6  9
 7  6
";

/// Directed acyclic graph (13 vertices, 15 edges).
pub const TINY_DAG: &str = "\
13
15
2 3
0 6
0 1
2 0
11 12
9 12
9 11
9 10
3 5
8 7
5 4
0 5
6 4
6 9
7 6
";

/// Edge-weighted undirected graph whose spanning tree weighs 1.81.
pub const TINY_EWG: &str = "\
8
16
4 5 .35
4 7 .37
5 7 .28
0 7 .16
1 5 .32
0 4 .38
2 3 .17
1 7 .19
0 2 .26
1 2 .36
1 3 .29
2 7 .34
6 2 .40
3 6 .52
6 0 .58
6 4 .93
";

/// Edge-weighted digraph with cycles and positive weights.
pub const TINY_EWD: &str = "\
8
15
4 5 0.35
5 4 0.35
4 7 0.37
5 7 0.28
7 5 0.28
5 1 0.32
0 4 0.38
0 2 0.26
7 3 0.39
1 3 0.29
2 7 0.34
6 2 0.40
3 6 0.52
6 0 0.58
6 4 0.93
";

/// Edge-weighted DAG.
pub const TINY_EWDAG: &str = "\
8
13
5 4 0.35
4 7 0.37
5 7 0.28
5 1 0.32
4 0 0.38
0 2 0.26
3 7 0.39
1 3 0.29
7 2 0.34
6 2 0.40
3 6 0.52
6 0 0.58
6 4 0.93
";

/// Airline routes for the symbol graph.
pub const ROUTES: &str = "\
JFK MCO
ORD DEN
ORD HOU
DFW PHX
JFK ATL
ORD DFW
ORD PHX
ATL HOU
DEN PHX
PHX LAX
JFK ORD
DEN LAS
DFW HOU
ORD ATL
LAS LAX
ATL MCO
HOU MCO
LAS PHX
";

/// Union-find connections over ten sites (two components).
pub const TINY_UF: &str = "\
10
4 3
3 8
6 5
9 4
2 1
8 9
5 0
7 2
6 1
1 0
6 7
";
