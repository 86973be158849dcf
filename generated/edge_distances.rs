[
    [7, 7, 0, 0, 7, 0, 0, 0],
    [7, 6, 0, 1, 6, 0, 0, 1],
    [7, 5, 0, 2, 5, 0, 0, 2],
    [7, 4, 0, 3, 4, 0, 0, 3],
    [7, 3, 0, 4, 3, 0, 0, 4],
    [7, 2, 0, 5, 2, 0, 0, 5],
    [7, 1, 0, 6, 1, 0, 0, 6],
    [7, 0, 0, 7, 0, 0, 0, 7],
    [6, 7, 1, 0, 6, 1, 0, 0],
    [6, 6, 1, 1, 6, 1, 1, 1],
    [6, 5, 1, 2, 5, 1, 1, 2],
    [6, 4, 1, 3, 4, 1, 1, 3],
    [6, 3, 1, 4, 3, 1, 1, 4],
    [6, 2, 1, 5, 2, 1, 1, 5],
    [6, 1, 1, 6, 1, 1, 1, 6],
    [6, 0, 1, 7, 0, 0, 1, 6],
    [5, 7, 2, 0, 5, 2, 0, 0],
    [5, 6, 2, 1, 5, 2, 1, 1],
    [5, 5, 2, 2, 5, 2, 2, 2],
    [5, 4, 2, 3, 4, 2, 2, 3],
    [5, 3, 2, 4, 3, 2, 2, 4],
    [5, 2, 2, 5, 2, 2, 2, 5],
    [5, 1, 2, 6, 1, 1, 2, 5],
    [5, 0, 2, 7, 0, 0, 2, 5],
    [4, 7, 3, 0, 4, 3, 0, 0],
    [4, 6, 3, 1, 4, 3, 1, 1],
    [4, 5, 3, 2, 4, 3, 2, 2],
    [4, 4, 3, 3, 4, 3, 3, 3],
    [4, 3, 3, 4, 3, 3, 3, 4],
    [4, 2, 3, 5, 2, 2, 3, 4],
    [4, 1, 3, 6, 1, 1, 3, 4],
    [4, 0, 3, 7, 0, 0, 3, 4],
    [3, 7, 4, 0, 3, 4, 0, 0],
    [3, 6, 4, 1, 3, 4, 1, 1],
    [3, 5, 4, 2, 3, 4, 2, 2],
    [3, 4, 4, 3, 3, 4, 3, 3],
    [3, 3, 4, 4, 3, 3, 4, 3],
    [3, 2, 4, 5, 2, 2, 4, 3],
    [3, 1, 4, 6, 1, 1, 4, 3],
    [3, 0, 4, 7, 0, 0, 4, 3],
    [2, 7, 5, 0, 2, 5, 0, 0],
    [2, 6, 5, 1, 2, 5, 1, 1],
    [2, 5, 5, 2, 2, 5, 2, 2],
    [2, 4, 5, 3, 2, 4, 3, 2],
    [2, 3, 5, 4, 2, 3, 4, 2],
    [2, 2, 5, 5, 2, 2, 5, 2],
    [2, 1, 5, 6, 1, 1, 5, 2],
    [2, 0, 5, 7, 0, 0, 5, 2],
    [1, 7, 6, 0, 1, 6, 0, 0],
    [1, 6, 6, 1, 1, 6, 1, 1],
    [1, 5, 6, 2, 1, 5, 2, 1],
    [1, 4, 6, 3, 1, 4, 3, 1],
    [1, 3, 6, 4, 1, 3, 4, 1],
    [1, 2, 6, 5, 1, 2, 5, 1],
    [1, 1, 6, 6, 1, 1, 6, 1],
    [1, 0, 6, 7, 0, 0, 6, 1],
    [0, 7, 7, 0, 0, 7, 0, 0],
    [0, 6, 7, 1, 0, 6, 1, 0],
    [0, 5, 7, 2, 0, 5, 2, 0],
    [0, 4, 7, 3, 0, 4, 3, 0],
    [0, 3, 7, 4, 0, 3, 4, 0],
    [0, 2, 7, 5, 0, 2, 5, 0],
    [0, 1, 7, 6, 0, 1, 6, 0],
    [0, 0, 7, 7, 0, 0, 7, 0],
]
